//! Quote subdomain — price estimation from area and unit rate.

pub mod calculator;
