mod ids;
mod playlist;
mod user;
mod video;

pub use ids::{PlaylistId, UserId, VideoId};
pub use playlist::{CreatePlaylist, Playlist, UpdatePlaylist};
pub use user::{CreateUser, UpdateUser, User};
pub use video::{NewVideo, Video};
