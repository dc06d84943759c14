pub mod census;
pub mod initial;
pub mod site;
