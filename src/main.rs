// SPDX-License-Identifier: MPL-2.0
use astro_gallery::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").ok().flatten(),
        api_key: args.opt_value_from_str("--api-key").ok().flatten(),
    };

    app::run(flags)
}
