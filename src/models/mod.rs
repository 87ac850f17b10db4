pub mod company;
pub mod icp;
pub mod review;

pub use company::*;
pub use icp::*;
pub use review::*;
