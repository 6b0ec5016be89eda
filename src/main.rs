use std::error::Error;
use std::time::Duration;

use clap::Parser;
use dragon_curve::{
    CliArgs, DragonCliController, FrameOutput, ImmediateTicker, PacedTicker, PpmFilePresenter,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run(CliArgs::parse())
}

fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let mut controller = DragonCliController::new(PpmFilePresenter::new(), args.curve.to_config())
        .with_trace(!args.no_trace);

    if let Some(dir) = &args.frames_dir {
        controller = controller.with_frames(FrameOutput::new(dir, args.frame_every));
    }

    match args.fps {
        Some(fps) => {
            let interval = Duration::try_from_secs_f64(1.0 / fps)?;
            controller.generate(&mut PacedTicker::new(interval))?
        }
        None => controller.generate(&mut ImmediateTicker::new())?,
    };

    if args.dump {
        if let Some(sequence) = controller.turn_sequence() {
            println!("{}", sequence.to_bit_string());
            println!("{}", sequence.to_letter_string());
        }
    }

    controller.write(&args.output)?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
