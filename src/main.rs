use clap::Parser;
use smfseq::prelude::*;
use std::path::PathBuf;

fn main() {
    let result = main_result();
    std::process::exit(match result {
        Ok(()) => 0,
        Err(err) => {
            // use Display instead of Debug for user friendly error messages
            log::error!("{err}");
            1
        }
    });
}

pub fn main_result() -> Result<(), AppError> {
    // setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("smfseq=info"))
        .init();

    let args = CliArgs::parse();
    let output = PathBuf::from(args.output);

    let sequence = demo_sequence(args.resolution, args.bpm)?;
    log::info!(
        "Built {} tracks lasting {} ticks at {} ticks per quarter note",
        sequence.num_tracks(),
        sequence.duration(),
        sequence.resolution().ticks_per_quarter_note()
    );

    write_file(&sequence, &output)?;
    Ok(())
}

/// A tempo track and one note track, in the spirit of a "hello world" file.
fn demo_sequence(resolution: u16, bpm: u32) -> Result<Sequence, MidiError> {
    let mut sequence = Sequence::with_resolution(resolution)?;
    let ticks = u64::from(resolution);

    let conductor = sequence.create_track();
    conductor.append(Event::new(MetaMessage::tempo(bpm)?, 0))?;
    conductor.append(Event::new(MetaMessage::time_signature(4, 4), 0))?;
    conductor.append(Event::new(MetaMessage::marker("Intro"), 0))?;

    let piano = sequence.create_track();
    piano.append(Event::new(MetaMessage::text("Piano"), 0))?;
    piano.append(Event::new(ChannelMessage::program_change(0, 0)?, 0))?;
    // C major arpeggio, one quarter note each
    for (i, note) in [60, 64, 67, 72].into_iter().enumerate() {
        let start = i as u64 * ticks;
        piano.append(Event::new(ChannelMessage::note_on(0, note, 80)?, start))?;
        piano.append(Event::new(ChannelMessage::note_off(0, note, 64)?, start + ticks))?;
    }
    // hold a bar of silence before the end
    piano.extend_to(8 * ticks)?;

    Ok(sequence)
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Path of the MIDI file to write.
    #[arg(long, default_value = "demo.mid")]
    output: String,
    /// Ticks per quarter note.
    #[arg(long, default_value_t = 192)]
    resolution: u16,
    /// Tempo in beats per minute.
    #[arg(long, default_value_t = 120)]
    bpm: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("sequence error: {0}")]
    SequenceError(#[from] MidiError),
    #[error("write error: {0}")]
    WriteError(#[from] WriteError<std::io::Error>),
}
