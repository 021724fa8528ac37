use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

pub mod category;
pub mod product;

/// Operator-selected department. Picks the initial category set of a run and
/// the reviewer-name heuristic.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum GenderCode {
    #[display("Mujer")]
    Women = 1,
    #[display("Hombre")]
    Men = 2,
    #[display("Niños")]
    Kids = 3,
    #[display("Belleza")]
    Beauty = 4,
    #[display("Mujer Joyas")]
    WomenJewelry = 5,
    #[display("Mujer Calzado")]
    WomenFootwear = 6,
    #[display("Hombre Joyas")]
    MenJewelry = 7,
    #[display("Hombre Calzado")]
    MenFootwear = 8,
}

impl GenderCode {
    pub const ALL: [GenderCode; 8] = [
        Self::Women,
        Self::Men,
        Self::Kids,
        Self::Beauty,
        Self::WomenJewelry,
        Self::WomenFootwear,
        Self::MenJewelry,
        Self::MenFootwear,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn reviewer_gender(self) -> ReviewerGender {
        match self {
            Self::Women | Self::WomenJewelry | Self::WomenFootwear => ReviewerGender::Female,
            Self::Men => ReviewerGender::Male,
            _ => ReviewerGender::Neutral,
        }
    }
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Unknown gender code {_0:?}, expected 1..8")]
pub struct UnknownGenderCode(#[error(ignore)] pub String);

impl TryFrom<u8> for GenderCode {
    type Error = UnknownGenderCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|g| g.code() == code)
            .ok_or_else(|| UnknownGenderCode(code.to_string()))
    }
}

impl From<GenderCode> for u8 {
    fn from(code: GenderCode) -> u8 {
        code.code()
    }
}

impl std::str::FromStr for GenderCode {
    type Err = UnknownGenderCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| UnknownGenderCode(s.to_string()))
            .and_then(GenderCode::try_from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ReviewerGender {
    #[display("female")]
    Female,
    #[display("male")]
    Male,
    #[display("neutral")]
    Neutral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gender_codes() {
        assert_eq!("1".parse::<GenderCode>(), Ok(GenderCode::Women));
        assert_eq!(" 6 ".parse::<GenderCode>(), Ok(GenderCode::WomenFootwear));
        assert!("0".parse::<GenderCode>().is_err());
        assert!("9".parse::<GenderCode>().is_err());
        assert!("mujer".parse::<GenderCode>().is_err());
    }

    #[test]
    fn reviewer_gender_follows_department() {
        assert_eq!(GenderCode::Women.reviewer_gender(), ReviewerGender::Female);
        assert_eq!(GenderCode::WomenJewelry.reviewer_gender(), ReviewerGender::Female);
        assert_eq!(GenderCode::Men.reviewer_gender(), ReviewerGender::Male);
        assert_eq!(GenderCode::MenFootwear.reviewer_gender(), ReviewerGender::Neutral);
        assert_eq!(GenderCode::Kids.reviewer_gender(), ReviewerGender::Neutral);
    }
}
