//! Domain enumerations shared by the todo form and the task store.
//!
//! Both enums serialize as their display strings so that stored files match
//! the values the forms have always used (`"Rendah"`, `"Sedang Dikerjakan"`,
//! ...). Variant order is significant: the first variant is the default
//! selection of the corresponding form control.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority. First variant is the form's default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Rendah,
    Sedang,
    Tinggi,
}

impl Priority {
    /// All priorities in selector order.
    pub const ALL: [Priority; 3] = [Priority::Rendah, Priority::Sedang, Priority::Tinggi];

    /// Next value in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Priority::Rendah => Priority::Sedang,
            Priority::Sedang => Priority::Tinggi,
            Priority::Tinggi => Priority::Rendah,
        }
    }

    /// Previous value in selector order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Priority::Rendah => Priority::Tinggi,
            Priority::Sedang => Priority::Rendah,
            Priority::Tinggi => Priority::Sedang,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Rendah => "Rendah",
            Priority::Sedang => "Sedang",
            Priority::Tinggi => "Tinggi",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Rendah" => Ok(Priority::Rendah),
            "Sedang" => Ok(Priority::Sedang),
            "Tinggi" => Ok(Priority::Tinggi),
            _ => Err(()),
        }
    }
}

/// Task status. First variant is the form's default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Belum,
    #[serde(rename = "Sedang Dikerjakan")]
    SedangDikerjakan,
    Selesai,
}

impl Status {
    /// All statuses in selector order.
    pub const ALL: [Status; 3] = [Status::Belum, Status::SedangDikerjakan, Status::Selesai];

    /// Next value in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Status::Belum => Status::SedangDikerjakan,
            Status::SedangDikerjakan => Status::Selesai,
            Status::Selesai => Status::Belum,
        }
    }

    /// Previous value in selector order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Status::Belum => Status::Selesai,
            Status::SedangDikerjakan => Status::Belum,
            Status::Selesai => Status::SedangDikerjakan,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Belum => "Belum",
            Status::SedangDikerjakan => "Sedang Dikerjakan",
            Status::Selesai => "Selesai",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Belum" => Ok(Status::Belum),
            "Sedang Dikerjakan" => Ok(Status::SedangDikerjakan),
            "Selesai" => Ok(Status::Selesai),
            _ => Err(()),
        }
    }
}
