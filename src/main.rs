use anyhow::Result;
use clap::{App as Cli, Arg};
use condensed_banner::app::{App, LaunchOptions};
use condensed_banner::banner::BannerConfig;
use condensed_banner::config::{BackgroundSetting, Config};
use condensed_banner::ui::THEME_NAMES;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("banner")
                .long("banner")
                .value_name("MODE")
                .help("Override when the banner is shown")
                .possible_values(&["always", "once", "never"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .long("theme")
                .value_name("NAME")
                .help("Override the color theme")
                .possible_values(THEME_NAMES)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("completed")
                .long("completed")
                .help("Start on the final frame"),
        )
        .arg(
            Arg::with_name("screen-reader")
                .long("screen-reader")
                .help("Skip the animation for screen readers"),
        )
        .arg(
            Arg::with_name("light")
                .long("light")
                .conflicts_with("dark")
                .help("Use the light background palette"),
        )
        .arg(
            Arg::with_name("dark")
                .long("dark")
                .help("Use the dark background palette"),
        )
        .arg(
            Arg::with_name("hold")
                .long("hold")
                .help("Keep the banner on screen until a key is pressed"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    if let Some(mode) = matches.value_of("banner") {
        config.banner = Some(mode.parse::<BannerConfig>()?);
    }
    if let Some(theme) = matches.value_of("theme") {
        config.theme_name = theme.to_string();
    }
    if matches.is_present("screen-reader") {
        config.screen_reader = true;
    }
    if matches.is_present("light") {
        config.background = BackgroundSetting::Light;
    } else if matches.is_present("dark") {
        config.background = BackgroundSetting::Dark;
    }

    let options = LaunchOptions {
        completed: matches.is_present("completed"),
        hold: matches.is_present("hold"),
    };
    App::start(config, options).await?;
    Ok(())
}
