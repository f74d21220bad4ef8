pub mod epwing;
pub mod jmnedict;
