use crate::cli::{Args, Command};
use crate::config::Config;
use crate::constants::kinds;
use crate::data_fetcher::{CatalogClient, Track, Vocal};
use crate::error::AppError;
use serde::Serialize;
use std::io::{Write, stdout};
use tracing::info;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Starts from the config file on disk (or defaults) so that environment
/// overrides are never written back.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = Config::load_from_path(&config_path)
        .await
        .unwrap_or_default();

    if let Some(new_url) = &args.new_api_url {
        config.api_url = new_url.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(&config_path).await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Runs one catalog command and prints its result to stdout.
pub async fn handle_fetch_command(
    client: &CatalogClient,
    command: &Command,
    json: bool,
) -> Result<(), AppError> {
    let mut out = stdout();

    match command {
        Command::List { kind } => {
            let tracks = client.fetch_collection(kind).await;
            render_tracks(&mut out, &tracks, json)
        }
        Command::Show { kind, id } => {
            let track = client.fetch_single(kind, id).await?;
            render_tracks(&mut out, std::slice::from_ref(&track), json)
        }
        Command::Vocals { beat_id } => {
            let vocals = client.fetch_vocals_for_beat(beat_id).await;
            render_vocals(&mut out, &vocals, json)
        }
        Command::Beat { id } => {
            let (beat, vocals) = tokio::join!(
                client.fetch_single(kinds::BEAT, id),
                client.fetch_vocals_for_beat(id)
            );
            let beat = beat?;
            info!("Beat {id} has {} vocals", vocals.len());
            render_beat(&mut out, &beat, &vocals, json)
        }
    }
}

#[derive(Serialize)]
struct BeatWithVocals<'a> {
    beat: &'a Track,
    vocals: &'a [Vocal],
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value).map_err(AppError::JsonSerialize)?;
    writeln!(out, "{text}")?;
    Ok(())
}

fn render_tracks<W: Write>(out: &mut W, tracks: &[Track], json: bool) -> Result<(), AppError> {
    if json {
        return write_json(out, tracks);
    }
    if tracks.is_empty() {
        writeln!(out, "No tracks.")?;
    }
    for track in tracks {
        writeln!(out, "{}", format_track(track))?;
    }
    Ok(())
}

fn render_vocals<W: Write>(out: &mut W, vocals: &[Vocal], json: bool) -> Result<(), AppError> {
    if json {
        return write_json(out, vocals);
    }
    if vocals.is_empty() {
        writeln!(out, "No vocals.")?;
    }
    for vocal in vocals {
        writeln!(out, "{}", format_vocal(vocal))?;
    }
    Ok(())
}

fn render_beat<W: Write>(
    out: &mut W,
    beat: &Track,
    vocals: &[Vocal],
    json: bool,
) -> Result<(), AppError> {
    if json {
        return write_json(out, &BeatWithVocals { beat, vocals });
    }
    writeln!(out, "{}", format_track(beat))?;
    for vocal in vocals {
        writeln!(out, "  {}", format_vocal(vocal))?;
    }
    Ok(())
}

fn format_track(track: &Track) -> String {
    format!(
        "{}\t{} - {}\t{}\t{}",
        track.id, track.title, track.artist, track.filename, track.img_path
    )
}

fn format_vocal(vocal: &Vocal) -> String {
    format!(
        "{}\t{} - {}\t{}\tbeat={}",
        vocal.id, vocal.title, vocal.artist, vocal.filename, vocal.beat_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::RecordId;

    fn track() -> Track {
        Track {
            id: RecordId::new("b1").unwrap(),
            title: "Beat One".to_string(),
            artist: "A".to_string(),
            filename: "b1.mp3".to_string(),
            img_path: "b1.png".to_string(),
        }
    }

    fn vocal() -> Vocal {
        Vocal {
            id: RecordId::new("v1").unwrap(),
            title: "T".to_string(),
            artist: "Ar".to_string(),
            filename: "v1.mp3".to_string(),
            beat_id: RecordId::new("b1").unwrap(),
        }
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> Result<(), AppError>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_tracks_text() {
        let text = rendered(|out| render_tracks(out, &[track()], false));
        assert_eq!(text, "b1\tBeat One - A\tb1.mp3\tb1.png\n");
    }

    #[test]
    fn test_render_empty_lists() {
        assert_eq!(rendered(|out| render_tracks(out, &[], false)), "No tracks.\n");
        assert_eq!(rendered(|out| render_vocals(out, &[], false)), "No vocals.\n");
    }

    #[test]
    fn test_render_beat_json() {
        let text = rendered(|out| render_beat(out, &track(), &[vocal()], true));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["beat"]["id"], "b1");
        assert_eq!(value["vocals"][0]["beat_id"], "b1");
    }

    #[test]
    fn test_render_beat_text_indents_vocals() {
        let text = rendered(|out| render_beat(out, &track(), &[vocal()], false));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("  v1\t"));
        assert!(lines[1].ends_with("beat=b1"));
    }
}
