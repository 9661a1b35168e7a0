//! The closed set of 24 primitive tags, with ordinals pinned by
//! `spec.md` §6 — these participate in every circuit's QGID and must never
//! be renumbered.

use crate::error::IrError;

/// A circuit's primitive operation. Fieldless by design (`spec.md` §9):
/// the closed variant set is part of the QGID contract and is dispatched by
/// pattern match, not virtual dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrimitiveTag {
    Id = 0,
    Compose = 1,
    Tensor = 2,
    Swap = 3,
    Bisum = 4,
    Inject = 5,
    Project = 6,
    Copy = 7,
    Delete = 8,
    Encode = 9,
    Decode = 10,
    Discard = 11,
    Trace = 12,
    Choi = 13,
    Kraus = 14,
    Unitary = 15,
    Instrument = 16,
    Branch = 17,
    Prepare = 18,
    Add = 19,
    Scale = 20,
    Zero = 21,
    Assert = 22,
    Witness = 23,
}

impl PrimitiveTag {
    /// All 24 tags, in ordinal order.
    pub const ALL: [PrimitiveTag; 24] = [
        PrimitiveTag::Id,
        PrimitiveTag::Compose,
        PrimitiveTag::Tensor,
        PrimitiveTag::Swap,
        PrimitiveTag::Bisum,
        PrimitiveTag::Inject,
        PrimitiveTag::Project,
        PrimitiveTag::Copy,
        PrimitiveTag::Delete,
        PrimitiveTag::Encode,
        PrimitiveTag::Decode,
        PrimitiveTag::Discard,
        PrimitiveTag::Trace,
        PrimitiveTag::Choi,
        PrimitiveTag::Kraus,
        PrimitiveTag::Unitary,
        PrimitiveTag::Instrument,
        PrimitiveTag::Branch,
        PrimitiveTag::Prepare,
        PrimitiveTag::Add,
        PrimitiveTag::Scale,
        PrimitiveTag::Zero,
        PrimitiveTag::Assert,
        PrimitiveTag::Witness,
    ];

    /// The stable on-wire ordinal for this tag.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// The tag's identifier, as it appears in `spec.md` §3.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveTag::Id => "Id",
            PrimitiveTag::Compose => "Compose",
            PrimitiveTag::Tensor => "Tensor",
            PrimitiveTag::Swap => "Swap",
            PrimitiveTag::Bisum => "Bisum",
            PrimitiveTag::Inject => "Inject",
            PrimitiveTag::Project => "Project",
            PrimitiveTag::Copy => "Copy",
            PrimitiveTag::Delete => "Delete",
            PrimitiveTag::Encode => "Encode",
            PrimitiveTag::Decode => "Decode",
            PrimitiveTag::Discard => "Discard",
            PrimitiveTag::Trace => "Trace",
            PrimitiveTag::Choi => "Choi",
            PrimitiveTag::Kraus => "Kraus",
            PrimitiveTag::Unitary => "Unitary",
            PrimitiveTag::Instrument => "Instrument",
            PrimitiveTag::Branch => "Branch",
            PrimitiveTag::Prepare => "Prepare",
            PrimitiveTag::Add => "Add",
            PrimitiveTag::Scale => "Scale",
            PrimitiveTag::Zero => "Zero",
            PrimitiveTag::Assert => "Assert",
            PrimitiveTag::Witness => "Witness",
        }
    }
}

impl TryFrom<u8> for PrimitiveTag {
    type Error = IrError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        PrimitiveTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.ordinal() == ordinal)
            .ok_or(IrError::InvalidPrimitiveOrdinal(ordinal))
    }
}

impl std::fmt::Display for PrimitiveTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_the_spec_table_exactly() {
        let expected = [
            ("Id", 0),
            ("Compose", 1),
            ("Tensor", 2),
            ("Swap", 3),
            ("Bisum", 4),
            ("Inject", 5),
            ("Project", 6),
            ("Copy", 7),
            ("Delete", 8),
            ("Encode", 9),
            ("Decode", 10),
            ("Discard", 11),
            ("Trace", 12),
            ("Choi", 13),
            ("Kraus", 14),
            ("Unitary", 15),
            ("Instrument", 16),
            ("Branch", 17),
            ("Prepare", 18),
            ("Add", 19),
            ("Scale", 20),
            ("Zero", 21),
            ("Assert", 22),
            ("Witness", 23),
        ];
        for (tag, (name, ordinal)) in PrimitiveTag::ALL.iter().zip(expected.iter()) {
            assert_eq!(tag.name(), *name);
            assert_eq!(tag.ordinal(), *ordinal);
        }
    }

    #[test]
    fn ordinal_round_trips_exhaustively() {
        for tag in PrimitiveTag::ALL {
            let back = PrimitiveTag::try_from(tag.ordinal()).unwrap();
            assert_eq!(back, tag);
        }
    }

    #[test]
    fn unknown_ordinal_is_rejected() {
        assert!(matches!(
            PrimitiveTag::try_from(24),
            Err(IrError::InvalidPrimitiveOrdinal(24))
        ));
        assert!(matches!(
            PrimitiveTag::try_from(255),
            Err(IrError::InvalidPrimitiveOrdinal(255))
        ));
    }
}
