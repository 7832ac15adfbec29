//! Fixed profile of the site owner, used wherever the API fills in
//! defaults on the owner's behalf.

pub const OWNER_NAME: &str = "Dewanshu Singh Sisaudiya";
pub const OWNER_TITLE: &str = "Senior Manager – Software Engineering";
pub const OWNER_EMAIL: &str = "sisaudiya.dewan17@gmail.com";
pub const OWNER_PHONE: &str = "+91 7668436606";
pub const OWNER_LOCATION: &str = "Bangalore, India";
pub const OWNER_LINKEDIN: &str = "https://linkedin.com/in/dewanshu-sisaudiya";
pub const OWNER_GITHUB: &str = "https://github.com/dewanshu-sisaudiya";
