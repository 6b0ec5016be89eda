use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = dragon_curve::GuiArgs::parse();
    let presenter_factory = dragon_curve::PixelsPresenterFactory::new();
    let command = dragon_curve::RunGuiCommand::new(presenter_factory, args.curve.to_config());

    command.execute()
}
