use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A contraceptive method scored by the MEC summary chart.
///
/// Variants are declared in display order, and [`Method::ALL`] follows that
/// order. Every rendered recommendation list and chart series iterates it,
/// never the column order of the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Method {
    /// Copper intrauterine device.
    #[serde(rename = "Cu-IUD")]
    CuIud,
    /// Levonorgestrel intrauterine device.
    #[serde(rename = "LNG-IUD")]
    LngIud,
    Implant,
    /// Depot medroxyprogesterone acetate injection.
    #[serde(rename = "DMPA")]
    Dmpa,
    /// Progestin-only pill.
    #[serde(rename = "POP")]
    Pop,
    /// Combined hormonal contraception.
    #[serde(rename = "CHC")]
    Chc,
}

impl Method {
    pub const COUNT: usize = 6;

    pub const ALL: [Method; Method::COUNT] = [
        Method::CuIud,
        Method::LngIud,
        Method::Implant,
        Method::Dmpa,
        Method::Pop,
        Method::Chc,
    ];

    /// The method code, which is also its column header in the reference table.
    pub fn code(self) -> &'static str {
        match self {
            Method::CuIud => "Cu-IUD",
            Method::LngIud => "LNG-IUD",
            Method::Implant => "Implant",
            Method::Dmpa => "DMPA",
            Method::Pop => "POP",
            Method::Chc => "CHC",
        }
    }

    /// Short patient-facing description of the method.
    pub fn description(self) -> &'static str {
        match self {
            Method::CuIud => {
                "A small, T-shaped device inserted into the uterus that releases copper to prevent pregnancy."
            }
            Method::LngIud => {
                "A hormonal intrauterine device that releases levonorgestrel to prevent pregnancy."
            }
            Method::Implant => {
                "A small, flexible rod inserted under the skin of the upper arm that releases hormones."
            }
            Method::Dmpa => "An injection given every three months to prevent pregnancy.",
            Method::Pop => "A daily birth control pill that contains only progestin.",
            Method::Chc => {
                "Combined hormonal contraceptives including pills, patches, and vaginal rings."
            }
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Method {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.code() == s)
            .ok_or_else(|| CoreError::UnknownMethod(s.to_string()))
    }
}
