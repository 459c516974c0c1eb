use serde::{Deserialize, Serialize};

/// Minimum number of drivers that must be working on every open day.
pub const DRIVER_MIN_COUNT: usize = 6;

/// Vehicle license held by a staff member.
///
/// Serialized as the numeric code used by the staff records:
/// `0` none, `1` standard car, `2` wagon.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum LicenseType {
    #[default]
    None,
    StandardCar,
    Wagon,
}

impl LicenseType {
    /// Licensed for at least a standard car.
    pub fn can_drive(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Licensed for the facility wagon.
    pub fn allows_wagon(self) -> bool {
        matches!(self, Self::Wagon)
    }
}

impl TryFrom<u8> for LicenseType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::StandardCar),
            2 => Ok(Self::Wagon),
            other => Err(format!("unknown license type code: {}", other)),
        }
    }
}

impl From<LicenseType> for u8 {
    fn from(license: LicenseType) -> Self {
        match license {
            LicenseType::None => 0,
            LicenseType::StandardCar => 1,
            LicenseType::Wagon => 2,
        }
    }
}

/// Task categories inferred from keywords in the task name.
///
/// A task name may place the task in several categories at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskCategory {
    Nursing,
    Training,
    Leadership,
    WagonDriving,
    StandardCarDriving,
    GenericDriving,
}

impl TaskCategory {
    /// Keywords that place a task name in this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Nursing => &["看護"],
            Self::Training => &["訓練"],
            Self::Leadership => &["リーダー", "サブリーダー"],
            Self::WagonDriving => &["ワゴン"],
            Self::StandardCarDriving => &["普通車"],
            Self::GenericDriving => &["運転", "送迎"],
        }
    }

    /// Whether `name` falls in this category.
    pub fn matches(self, name: &str) -> bool {
        self.keywords().iter().any(|keyword| name.contains(keyword))
    }
}
