// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_generate_completion;
mod cmd_render;
mod config;
mod logging;
mod options;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::cmd_render::CmdRender;
pub use crate::config::{
    APP_NAME, ColorConfig, Config, LevelsConfig, OptionsConfig, SinceConfig, parse_config,
};
pub use crate::options::{Options, Rendered};
