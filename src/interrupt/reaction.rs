//! Pending effects and the reactions that can answer them.

use smallvec::{smallvec, SmallVec};

use crate::board::Area;
use crate::cards::{PlayerCard, Reaction};
use crate::core::PlayerId;

/// What an effect is about to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingKind {
    /// Remove `victim`'s minion from `area`.
    MinionRemoval { victim: PlayerId, area: Area },
    /// Apply the text of `card`.
    CardText { card: PlayerCard },
}

/// An effect that has picked its targets but not yet changed anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingEffect {
    pub actor: PlayerId,
    pub kind: PendingKind,
    /// Players the effect would harm. Only they may react.
    pub affected: SmallVec<[PlayerId; 4]>,
}

impl PendingEffect {
    #[must_use]
    pub fn minion_removal(actor: PlayerId, victim: PlayerId, area: Area) -> Self {
        Self {
            actor,
            kind: PendingKind::MinionRemoval { victim, area },
            affected: smallvec![victim],
        }
    }

    #[must_use]
    pub fn card_text(
        actor: PlayerId,
        card: PlayerCard,
        affected: impl IntoIterator<Item = PlayerId>,
    ) -> Self {
        Self {
            actor,
            kind: PendingKind::CardText { card },
            affected: affected.into_iter().filter(|&p| p != actor).collect(),
        }
    }

    #[must_use]
    pub fn is_affected(&self, player: PlayerId) -> bool {
        player != self.actor && self.affected.contains(&player)
    }

    /// Short description used in interrupt prompts.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            PendingKind::MinionRemoval { victim, area } => {
                format!("{} is removing a minion of {victim} in {area}", self.actor)
            }
            PendingKind::CardText { card } => format!("{} is playing the text of {card}", self.actor),
        }
    }
}

impl Reaction {
    /// Whether a card with this reaction can answer `kind`.
    #[must_use]
    pub fn answers(self, kind: &PendingKind) -> bool {
        matches!(
            (self, kind),
            (Reaction::ShieldMinion | Reaction::RelocateMinion, PendingKind::MinionRemoval { .. })
                | (Reaction::CancelText, PendingKind::CardText { .. })
        )
    }

    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Reaction::ShieldMinion => "stop the removal",
            Reaction::RelocateMinion => "move the minion elsewhere",
            Reaction::CancelText => "cancel the text",
        }
    }
}
