//! Exact search and inference drivers built on [`arbnum`] expressions.
//!
//! Every driver here only consumes the public operations of the expression
//! engine (term append, concatenation, distribution, equality and ordering).
//! Most consumers will reach for [`subset::SubsetSearch`], [`qap::QapInstance`]
//! or [`inference::Neuron`], configured through [`config::SearchConfig`].

pub mod config;
pub mod inference;
pub mod permutation;
pub mod qap;
pub mod subset;
pub mod utils;

pub extern crate arbnum;
