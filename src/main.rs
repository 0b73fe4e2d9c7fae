// SPDX-License-Identifier: MPL-2.0
use iced_notify::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let position = args.opt_value_from_str("--position").unwrap_or_else(|err| {
        eprintln!("Ignoring --position: {err}");
        None
    });
    let config_path = args.opt_value_from_str("--config").unwrap_or_else(|err| {
        eprintln!("Ignoring --config: {err}");
        None
    });

    app::run(Flags {
        position,
        config_path,
    })
}
