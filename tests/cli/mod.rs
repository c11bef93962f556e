mod init;
mod login;
mod misc;
mod post;
mod related;
mod tags;
