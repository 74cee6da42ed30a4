pub(crate) mod configurations;
pub(crate) mod utils;

use ::anyhow::Context as _;
use ::domain::Resolution;
use ::domain::RESOLUTIONS;
use ::infrastructures::boundaries::CreateNoteView;
use ::infrastructures::gateways::clocks::LocalClock;
use ::infrastructures::gateways::fetchers::YoutubeDataApiFetcher;
use ::infrastructures::gateways::repositories::VaultNoteRepository;
use ::use_cases::boundaries::Accept;
use ::use_cases::boundaries::CreateNoteOutputBoundary;
use ::use_cases::boundaries::CreateNoteRequestModel;
use ::use_cases::gateways::Clock;
use ::use_cases::gateways::NoteRepository;
use ::use_cases::gateways::VideoMetadataFetcher;
use ::use_cases::interactors::CreateNoteInteractor;
use ::use_cases::models::errors::CreateNoteError;

use crate::configurations::expand_home;
use crate::configurations::Configurations;
use crate::configurations::DEFAULT_CONFIG_PATH;
use crate::configurations::DEFAULT_RESOLUTION;
use crate::utils::aliases::Fallible;
use crate::utils::extensions::OptionExt;

const API_KEY_VARIABLE: &str = "TUBER_API_KEY";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Fallible<()> {
    let (writer, _guard) = ::tracing_appender::non_blocking(::std::io::stderr());

    ::tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(
            ::tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| ::tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let matches = command().get_matches();

    let configurations = Configurations::load(&expand_home(
        matches.get_one::<::std::string::String>("config").ok()?,
    ))?;

    let Settings { api_key, resolution, vault } =
        resolve(&matches, &configurations, ::std::env::var(API_KEY_VARIABLE).ok())?;

    let view = ::std::sync::Arc::new(CreateNoteView::new()?);
    let fetcher = ::std::sync::Arc::new(YoutubeDataApiFetcher::builder().api_key(api_key).build());
    let notes = ::std::sync::Arc::new(VaultNoteRepository::builder().vault(vault).build());

    let create_note_interactor = ::std::sync::Arc::new(
        CreateNoteInteractor::builder()
            .output_boundary(view as ::std::sync::Arc<dyn CreateNoteOutputBoundary>)
            .fetcher(fetcher as ::std::sync::Arc<dyn VideoMetadataFetcher>)
            .notes(notes as ::std::sync::Arc<dyn NoteRepository>)
            .clock(::std::sync::Arc::new(LocalClock) as ::std::sync::Arc<dyn Clock>)
            .frontmatter(configurations.frontmatter)
            .build(),
    );

    let request = CreateNoteRequestModel::builder()
        .url(matches.get_one::<::std::string::String>("youtube-url").ok()?.to_owned())
        .resolution(resolution)
        .build();

    create_note_interactor.accept(request).await?;

    Ok(())
}

struct Settings {
    api_key: ::std::string::String,
    resolution: ::std::string::String,
    vault: ::std::path::PathBuf,
}

/// Command-line flags win over the config file, which wins over built-in defaults.
fn resolve(
    matches: &::clap::ArgMatches,
    configurations: &Configurations,
    api_key: Option<::std::string::String>,
) -> Fallible<Settings> {
    let api_key = api_key
        .filter(|api_key| !api_key.is_empty())
        .ok_or(CreateNoteError::MissingCredential(API_KEY_VARIABLE))?;

    let resolution = matches
        .get_one::<::std::string::String>("resolution")
        .cloned()
        .or_else(|| configurations.resolution.clone())
        .unwrap_or_else(|| DEFAULT_RESOLUTION.to_owned());

    let vault = matches
        .get_one::<::std::string::String>("vault")
        .map(|vault| expand_home(vault))
        .or_else(|| configurations.vault.clone())
        .context("no vault configured: pass --vault or set `vault` in the config file")?;

    Ok(Settings { api_key, resolution, vault })
}

fn command() -> ::clap::Command {
    ::clap::Command::new("tuber")
        .about("Fetch YouTube video metadata and write it into an Obsidian note with an embedded player.")
        .after_help(resolutions_help())
        .arg(
            ::clap::Arg::new("youtube-url")
                .value_name("youtube-url")
                .required(true)
                .help("YouTube video URL")
                .value_parser(::clap::value_parser!(::std::string::String)),
        )
        .arg(
            ::clap::Arg::new("config")
                .long("config")
                .value_name("PATH")
                .default_value(DEFAULT_CONFIG_PATH)
                .help("Config file path")
                .value_parser(::clap::value_parser!(::std::string::String)),
        )
        .arg(
            ::clap::Arg::new("resolution")
                .short('r')
                .long("resolution")
                .value_name("RES")
                .help(format!("Embedded player size [default: {DEFAULT_RESOLUTION}, or `resolution` from the config]"))
                .value_parser(::clap::builder::PossibleValuesParser::new(Resolution::names())),
        )
        .arg(
            ::clap::Arg::new("vault")
                .long("vault")
                .value_name("PATH")
                .help("Path to the Obsidian vault [default: `vault` from the config]")
                .value_parser(::clap::value_parser!(::std::string::String)),
        )
}

fn resolutions_help() -> String {
    let width = RESOLUTIONS.iter().map(|resolution| resolution.name.len()).max().unwrap_or_default() + 1;

    RESOLUTIONS.iter().fold(String::from("Available Resolutions:"), |help, resolution| {
        format!("{help}\n  {:<width$}: {resolution}", resolution.name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn restricts_resolutions_to_presets() {
        let matches = command().try_get_matches_from(["tuber", "https://youtu.be/x", "-r", "4K UHD"]).unwrap();
        assert_eq!(matches.get_one::<String>("resolution").map(String::as_str), Some("4K UHD"));

        assert!(command().try_get_matches_from(["tuber", "https://youtu.be/x", "-r", "1080p"]).is_err());
    }

    #[test]
    fn requires_a_url() {
        assert!(command().try_get_matches_from(["tuber", "--vault", "/tmp"]).is_err());
    }

    fn settings(args: &[&str], configurations: &Configurations, api_key: Option<&str>) -> Fallible<Settings> {
        let matches = command()
            .try_get_matches_from(["tuber", "https://youtu.be/x"].into_iter().chain(args.iter().copied()))
            .unwrap();

        resolve(&matches, configurations, api_key.map(str::to_owned))
    }

    fn configured(resolution: Option<&str>, vault: Option<&str>) -> Configurations {
        Configurations {
            resolution: resolution.map(str::to_owned),
            vault: vault.map(::std::path::PathBuf::from),
            ..Default::default()
        }
    }

    #[test]
    fn prefers_flags_over_the_config_file() {
        let configurations = configured(Some("SD"), Some("/from/config"));

        let settings = settings(&["-r", "HD", "--vault", "/from/flag"], &configurations, Some("key")).unwrap();

        assert_eq!(settings.resolution, "HD");
        assert_eq!(settings.vault, ::std::path::PathBuf::from("/from/flag"));
        assert_eq!(settings.api_key, "key");
    }

    #[test]
    fn falls_back_to_the_config_file() {
        let configurations = configured(Some("SD"), Some("/from/config"));

        let settings = settings(&[], &configurations, Some("key")).unwrap();

        assert_eq!(settings.resolution, "SD");
        assert_eq!(settings.vault, ::std::path::PathBuf::from("/from/config"));
    }

    #[test]
    fn defaults_the_resolution_to_fhd() {
        let settings = settings(&["--vault", "/notes"], &Configurations::default(), Some("key")).unwrap();

        assert_eq!(settings.resolution, DEFAULT_RESOLUTION);
        assert_eq!(settings.resolution, "FHD");
    }

    #[test]
    fn requires_a_vault() {
        assert!(settings(&[], &Configurations::default(), Some("key")).is_err());
    }

    #[test]
    fn requires_a_non_empty_api_key() {
        for api_key in [None, Some("")] {
            let err = settings(&["--vault", "/notes"], &Configurations::default(), api_key)
                .err()
                .unwrap();

            assert!(matches!(
                err.downcast_ref::<CreateNoteError>(),
                Some(CreateNoteError::MissingCredential(API_KEY_VARIABLE))
            ));
        }
    }

    #[test]
    fn lists_every_preset_in_the_help() {
        let help = resolutions_help();

        assert!(help.contains("FHD     : 1920x1080"));
        assert_eq!(help.lines().count(), RESOLUTIONS.len() + 1);
    }
}
