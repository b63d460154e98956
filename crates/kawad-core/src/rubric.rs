//! The fixed judging rubric.
//!
//! Five sections, each with a short list of criteria and an integer score
//! ceiling. The tables are compiled in; they are the competition's rubric,
//! not runtime configuration.

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

/// Section identifier, in judging order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum SectionId {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
}

impl SectionId {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A single scored line item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub id: &'static str,
    pub description: &'static str,
    pub max_score: u32,
}

/// A rubric section: ordered criteria plus the section ceiling
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub icon: &'static str,
    pub total_max: u32,
    pub criteria: &'static [Criterion],
}

/// Competing houses, in form order
pub const HOUSE_OPTIONS: [&str; 4] = [
    "Emerald (Hijau)",
    "Topaz (Kuning)",
    "Ruby (Merah)",
    "Sapphire (Biru)",
];

/// Maximum attainable grand total across all sections
pub const GRAND_MAX: u32 = 100;

pub const EVALUATION_SECTIONS: [Section; 5] = [
    Section {
        id: SectionId::A,
        title: "A. Kekemasan & Penampilan",
        icon: "fa-shirt",
        total_max: 20,
        criteria: &[
            Criterion {
                id: "a1",
                description: "Kekemasan pakaian seragam (lengkap & bersih)",
                max_score: 10,
            },
            Criterion {
                id: "a2",
                description: "Aksesori (tudung/songkok/beret)",
                max_score: 5,
            },
            Criterion {
                id: "a3",
                description: "Kekemasan diri keseluruhan",
                max_score: 5,
            },
        ],
    },
    Section {
        id: SectionId::B,
        title: "B. Kawalan Barisan & Pergerakan",
        icon: "fa-shoe-prints",
        total_max: 25,
        criteria: &[
            Criterion {
                id: "b1",
                description: "Keseragaman langkah & rentak",
                max_score: 10,
            },
            Criterion {
                id: "b2",
                description: "Kelurusan barisan & jarak ahli",
                max_score: 10,
            },
            Criterion {
                id: "b3",
                description: "Ketepatan pergerakan (pusing/henti)",
                max_score: 5,
            },
        ],
    },
    Section {
        id: SectionId::C,
        title: "C. Arahan & Kepimpinan Ketua",
        icon: "fa-bullhorn",
        total_max: 20,
        criteria: &[
            Criterion {
                id: "c1",
                description: "Kelantangan & kejelasan suara",
                max_score: 10,
            },
            Criterion {
                id: "c2",
                description: "Ketepatan arahan (intonasi/masa)",
                max_score: 5,
            },
            Criterion {
                id: "c3",
                description: "Kawalan diri & daya kepimpinan",
                max_score: 5,
            },
        ],
    },
    Section {
        id: SectionId::D,
        title: "D. Kerjasama & Disiplin Ahli",
        icon: "fa-users-gear",
        total_max: 20,
        criteria: &[
            Criterion {
                id: "d1",
                description: "Semangat & Vitality",
                max_score: 10,
            },
            Criterion {
                id: "d2",
                description: "Disiplin barisan sepanjang kawad",
                max_score: 5,
            },
            Criterion {
                id: "d3",
                description: "Keserasian antara ahli",
                max_score: 5,
            },
        ],
    },
    Section {
        id: SectionId::E,
        title: "E. Keseluruhan & Impak Persembahan",
        icon: "fa-wand-magic-sparkles",
        total_max: 15,
        criteria: &[
            Criterion {
                id: "e1",
                description: "Kreativiti gaya persembahan",
                max_score: 10,
            },
            Criterion {
                id: "e2",
                description: "Impak visual & aura pasukan",
                max_score: 5,
            },
        ],
    },
];

/// All sections in judging order
pub fn sections() -> &'static [Section] {
    &EVALUATION_SECTIONS
}

/// Look up a section by identifier
pub fn section(id: SectionId) -> &'static Section {
    &EVALUATION_SECTIONS[id as usize]
}

/// Look up a criterion by its identifier
pub fn find_criterion(id: &str) -> Option<&'static Criterion> {
    EVALUATION_SECTIONS
        .iter()
        .flat_map(|s| s.criteria.iter())
        .find(|c| c.id == id)
}
