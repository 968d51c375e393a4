// Service module exports

pub mod countdown;
