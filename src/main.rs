mod backend;
mod frontend;

use iced::Task;
use tracing::info;

use backend::database::Database;
use backend::filemanager::DataDir;
use backend::settings::Settings;
use frontend::application::Application;
use frontend::message::Message;

fn main() -> anyhow::Result<()> {
    let directories = DataDir::create_or_load()?;
    let settings = Settings::load(directories.get_root_ref());

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level)
        .init();

    let database = Database::create_or_load(directories.get_root_ref(), &settings.database_file)?;
    info!(path = ?database.path(), "library opened");

    iced::application("Music Organizer", Application::update, Application::view)
        .run_with(move || (Application::new(database), Message::Refresh.task()))?;

    Ok(())
}
