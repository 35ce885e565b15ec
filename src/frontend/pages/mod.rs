pub mod library_page;
pub mod playlists_page;
