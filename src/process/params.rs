// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters controlling how visibilities are processed.

use std::{fs::File, io::Read, path::Path, str::FromStr};

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::ProcessError;
use crate::constants::DEFAULT_SIGMA_RESCALE;

#[derive(Debug, Display, EnumIter, EnumString)]
pub(crate) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingParams {
    /// The factor by which sigmas are rescaled. Weights are divided by the
    /// square of this.
    pub sigma_rescale: f64,

    /// Should the model visibilities also be processed?
    pub model_data: bool,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        ProcessingParams {
            sigma_rescale: DEFAULT_SIGMA_RESCALE,
            model_data: false,
        }
    }
}

impl ProcessingParams {
    /// Read parameters from a toml or json file. Any parameters not in the
    /// file take their default values.
    pub fn from_arg_file(arg_file: &Path) -> Result<ProcessingParams, ProcessError> {
        debug!("Attempting to parse argument file {}", arg_file.display());

        let arg_file_type = arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        let mut contents = String::new();
        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(arg_file)?;
                fh.read_to_string(&mut contents)?;
                toml::from_str(&contents).map_err(|err| {
                    ProcessError::ArgFile(format!(
                        "Couldn't decode toml structure from {arg_file:?}:\n{err}"
                    ))
                })
            }

            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(arg_file)?;
                fh.read_to_string(&mut contents)?;
                serde_json::from_str(&contents).map_err(|err| {
                    ProcessError::ArgFile(format!(
                        "Couldn't decode json structure from {arg_file:?}:\n{err}"
                    ))
                })
            }

            None => Err(ProcessError::ArgFile(format!(
                "Argument file {arg_file:?} doesn't have a recognised file extension! Valid extensions are: {}",
                ArgFileTypes::iter().join(", ")
            ))),
        }
    }
}
