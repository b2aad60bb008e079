pub mod cliques;
pub mod clusters;
pub mod generate;
