pub mod assignment;
pub mod dashboard;
pub mod department;
pub mod issue;
pub mod seed;
