pub mod sqlite_user_repo;
pub mod sqlite_gym_repo;
pub mod sqlite_branch_repo;
pub mod sqlite_member_repo;
pub mod sqlite_payment_repo;
pub mod sqlite_attendance_repo;
pub mod sqlite_communication_repo;
pub mod sqlite_auth_repo;
