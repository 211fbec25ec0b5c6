#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Role {
    Admin = 1,
    Employee = 2,
}

impl Role {
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::Employee),
            _ => None,
        }
    }
}
