
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use builders::*;
