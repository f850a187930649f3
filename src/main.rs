use miclock::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_path: args.opt_value_from_str("--config").unwrap(),
        background: args.opt_value_from_str("--background").unwrap(),
    };

    app::run(flags)
}
