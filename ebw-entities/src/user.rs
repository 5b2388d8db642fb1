use crate::{email::*, id::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id           : Id,
    pub email        : EmailAddress,
    pub display_name : String,
    pub role         : Role,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Role {
    #[default]
    Guest  = 0,
    User   = 1,
    Editor = 2,
    Admin  = 3,
}
