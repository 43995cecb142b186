pub mod contact;
pub mod init;
pub mod inspect;
pub mod run;
pub mod show;
