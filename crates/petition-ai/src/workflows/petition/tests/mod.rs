mod common;
mod criteria;
mod recommendation;
mod review;
