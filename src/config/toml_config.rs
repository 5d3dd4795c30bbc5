use crate::domain::model::{Room, RoomKind};
use crate::utils::error::{HotelError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_positive_number, validate_unique,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_HOTEL_NAME: &str = "vacak";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelConfig {
    pub hotel: HotelSection,
    #[serde(default)]
    pub rooms: Vec<RoomConfig>,
    #[serde(default)]
    pub reservations: Vec<SeedReservation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSection {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    pub number: u32,
    pub kind: RoomKind,
    pub nightly_rate: u64,
}

impl RoomConfig {
    pub fn to_room(&self) -> Room {
        Room::new(self.number, self.kind, self.nightly_rate)
    }
}

/// Fixture reservation, positioned relative to the current date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedReservation {
    pub room: u32,
    pub start_offset_days: i64,
    pub nights: i64,
}

impl Default for HotelConfig {
    /// 內建的示範資料
    fn default() -> Self {
        let room = |number, kind, nightly_rate| RoomConfig {
            number,
            kind,
            nightly_rate,
        };
        let seed = |room, start_offset_days, nights| SeedReservation {
            room,
            start_offset_days,
            nights,
        };

        Self {
            hotel: HotelSection {
                name: DEFAULT_HOTEL_NAME.to_string(),
            },
            rooms: vec![
                room(1, RoomKind::Single, 200),
                room(2, RoomKind::Double, 450),
                room(33, RoomKind::Single, 666),
            ],
            reservations: vec![
                seed(1, 0, 1),
                seed(2, 0, 5),
                seed(33, 5, 1),
                seed(33, 2, 1),
                seed(33, 7, 8),
            ],
        }
    }
}

impl HotelConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${HOTEL_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| HotelError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn without_reservations(mut self) -> Self {
        self.reservations.clear();
        self
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("hotel.name", &self.hotel.name)?;
        validate_non_empty_list("rooms", &self.rooms)?;
        validate_unique("rooms.number", self.rooms.iter().map(|room| room.number))?;

        for reservation in &self.reservations {
            if !self.rooms.iter().any(|room| room.number == reservation.room) {
                return Err(HotelError::InvalidConfigValueError {
                    field: "reservations.room".to_string(),
                    value: reservation.room.to_string(),
                    reason: "Room is not configured".to_string(),
                });
            }
            validate_positive_number("reservations.nights", reservation.nights, 1)?;
        }

        Ok(())
    }
}

impl Validate for HotelConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[hotel]
name = "Seaside"

[[rooms]]
number = 10
kind = "single"
nightly_rate = 120

[[rooms]]
number = 11
kind = "double"
nightly_rate = 210

[[reservations]]
room = 11
start_offset_days = 3
nights = 2
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = HotelConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.hotel.name, "Seaside");
        assert_eq!(config.rooms.len(), 2);
        assert_eq!(config.rooms[1].to_room(), Room::double(11, 210));
        assert_eq!(config.reservations[0].nights, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reservations_section_is_optional() {
        let config = HotelConfig::from_toml_str(
            r#"
[hotel]
name = "Bare"

[[rooms]]
number = 1
kind = "double"
nightly_rate = 100
"#,
        )
        .unwrap();
        assert!(config.reservations.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HOTEL_REGISTRY_TEST_NAME", "Env Hotel");

        let config = HotelConfig::from_toml_str(
            r#"
[hotel]
name = "${HOTEL_REGISTRY_TEST_NAME}"

[[rooms]]
number = 1
kind = "single"
nightly_rate = 100
"#,
        )
        .unwrap();
        assert_eq!(config.hotel.name, "Env Hotel");

        std::env::remove_var("HOTEL_REGISTRY_TEST_NAME");
    }

    #[test]
    fn test_unknown_room_kind_is_a_parse_error() {
        let err = HotelConfig::from_toml_str(
            r#"
[hotel]
name = "Odd"

[[rooms]]
number = 1
kind = "suite"
nightly_rate = 100
"#,
        )
        .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_config_validation() {
        let mut config = HotelConfig::from_toml_str(BASIC).unwrap();
        config.rooms[1].number = 10;
        assert!(config.validate().is_err());

        let mut config = HotelConfig::from_toml_str(BASIC).unwrap();
        config.reservations[0].room = 99;
        assert!(config.validate().is_err());

        let mut config = HotelConfig::from_toml_str(BASIC).unwrap();
        config.reservations[0].nights = 0;
        assert!(config.validate().is_err());

        let mut config = HotelConfig::from_toml_str(BASIC).unwrap();
        config.hotel.name = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_fixture_is_valid() {
        let config = HotelConfig::default();
        assert_eq!(config.hotel.name, DEFAULT_HOTEL_NAME);
        assert_eq!(config.rooms.len(), 3);
        assert_eq!(config.reservations.len(), 5);
        assert!(config.validate().is_ok());
        assert!(config.without_reservations().reservations.is_empty());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = HotelConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.hotel.name, "Seaside");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = HotelConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, HotelError::IoError(_)));
    }
}
