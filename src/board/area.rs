//! The twelve areas of the city.
//!
//! Areas are static data: a stable code (1..=12), a display name, the cost of
//! building there and the text of the area's city card. Metadata is stored in
//! a lookup table indexed by the enum discriminant.

use serde::{Deserialize, Serialize};

/// Number of areas on the board.
pub const AREA_COUNT: usize = 12;

/// A board area. Discriminants are the stable area codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Area {
    DollySisters = 1,
    UnrealEstate = 2,
    DragonsLanding = 3,
    SmallGods = 4,
    TheScours = 5,
    TheHippo = 6,
    TheShades = 7,
    Dimwell = 8,
    Longwall = 9,
    IsleOfGods = 10,
    SevenSleepers = 11,
    NapHill = 12,
}

struct AreaInfo {
    name: &'static str,
    building_cost: u32,
    city_text: &'static str,
}

const AREA_INFO: [AreaInfo; AREA_COUNT] = [
    AreaInfo {
        name: "Dolly Sisters",
        building_cost: 6,
        city_text: "Once per turn, pay $3 to place a minion in Dolly Sisters or an adjacent area.",
    },
    AreaInfo {
        name: "Unreal Estate",
        building_cost: 18,
        city_text: "Once per turn, draw a card from the draw pile, then discard a card.",
    },
    AreaInfo {
        name: "Dragon's Landing",
        building_cost: 12,
        city_text: "Once per turn, take $2 from the bank.",
    },
    AreaInfo {
        name: "Small Gods",
        building_cost: 18,
        city_text: "When a random event affects one of your pieces, pay $3 to ignore it.",
    },
    AreaInfo {
        name: "The Scours",
        building_cost: 6,
        city_text: "Once per turn, discard a card to take $2 from the bank.",
    },
    AreaInfo {
        name: "The Hippo",
        building_cost: 12,
        city_text: "Once per turn, take $2 from the bank.",
    },
    AreaInfo {
        name: "The Shades",
        building_cost: 6,
        city_text: "Once per turn, place a trouble marker in The Shades or an adjacent area that contains a minion.",
    },
    AreaInfo {
        name: "Dimwell",
        building_cost: 6,
        city_text: "Once per turn, pay $3 to place a minion in Dimwell or an adjacent area.",
    },
    AreaInfo {
        name: "Longwall",
        building_cost: 12,
        city_text: "Once per turn, take $1 from the bank.",
    },
    AreaInfo {
        name: "Isle of Gods",
        building_cost: 12,
        city_text: "Once per turn, pay $2 to remove a trouble marker.",
    },
    AreaInfo {
        name: "Seven Sleepers",
        building_cost: 18,
        city_text: "Once per turn, take $3 from the bank.",
    },
    AreaInfo {
        name: "Nap Hill",
        building_cost: 12,
        city_text: "Once per turn, take $1 from the bank.",
    },
];

impl Area {
    /// All areas in code order.
    pub const ALL: [Area; AREA_COUNT] = [
        Area::DollySisters,
        Area::UnrealEstate,
        Area::DragonsLanding,
        Area::SmallGods,
        Area::TheScours,
        Area::TheHippo,
        Area::TheShades,
        Area::Dimwell,
        Area::Longwall,
        Area::IsleOfGods,
        Area::SevenSleepers,
        Area::NapHill,
    ];

    /// Look up an area by its code.
    ///
    /// ```
    /// use ankh_engine::board::Area;
    ///
    /// assert_eq!(Area::from_code(7), Some(Area::TheShades));
    /// assert_eq!(Area::from_code(0), None);
    /// ```
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code).checked_sub(1)?).copied()
    }

    /// The stable area code (1..=12).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Zero-based index, for array-backed per-area storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        AREA_INFO[self.index()].name
    }

    /// Cost of placing a building here.
    #[must_use]
    pub const fn building_cost(self) -> u32 {
        AREA_INFO[self.index()].building_cost
    }

    /// Text of this area's city card.
    #[must_use]
    pub const fn city_text(self) -> &'static str {
        AREA_INFO[self.index()].city_text
    }

    /// Whether the city card may be used more than once per round.
    #[must_use]
    pub const fn is_replayable(self) -> bool {
        matches!(self, Area::SmallGods)
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for area in Area::ALL {
            assert_eq!(Area::from_code(area.code()), Some(area));
        }
        assert_eq!(Area::from_code(13), None);
    }

    #[test]
    fn test_all_in_code_order() {
        for (i, area) in Area::ALL.iter().enumerate() {
            assert_eq!(area.index(), i);
        }
    }

    #[test]
    fn test_building_costs() {
        assert_eq!(Area::DollySisters.building_cost(), 6);
        assert_eq!(Area::SmallGods.building_cost(), 18);
        assert_eq!(Area::TheHippo.building_cost(), 12);
        let total: u32 = Area::ALL.iter().map(|a| a.building_cost()).sum();
        assert_eq!(total, 138);
    }

    #[test]
    fn test_only_small_gods_is_replayable() {
        let replayable: Vec<_> = Area::ALL.into_iter().filter(|a| a.is_replayable()).collect();
        assert_eq!(replayable, vec![Area::SmallGods]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Area::DragonsLanding.to_string(), "Dragon's Landing");
        assert_eq!(Area::IsleOfGods.to_string(), "Isle of Gods");
    }
}
