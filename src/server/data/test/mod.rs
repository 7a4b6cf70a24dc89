mod cancellation;
mod comment;
mod history;
mod initiative;
mod permission;
mod prioritization;
mod sector;
mod user;
