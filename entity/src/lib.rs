pub mod answer;
pub mod category;
pub mod certificate;
pub mod community;
pub mod company;
pub mod enrollment;
pub mod forum_post;
pub mod forum_thread;
pub mod kandidat;
pub mod kursus;
pub mod lowongan;
pub mod question;
pub mod quiz;
pub mod topic;
pub mod user;
