use super::UserRole;

#[derive(Debug, Clone, Default)]
pub struct GetUserDto {
    /// Substring of email or name
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// `email`, `name` or `role`; newest first otherwise
    pub sort_by: Option<String>,
}
