use desk_scene::SceneConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SceneConfig::from_env();
    log::info!(
        "Starting {} ({}x{}, textures from {})",
        config.title,
        config.width,
        config.height,
        config.texture_dir.display()
    );

    desk_scene::run(config)
}
