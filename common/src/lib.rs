// target-independent half of sitekit
//
// everything in here is plain rust with no browser types, so the behaviour the page depends
// on can be unit tested on the host.  the webapp crate projects it onto the dom
pub mod config;
pub mod form;
pub mod media;
pub mod menu;
pub mod page;
pub mod rate;
pub mod selectors;
pub mod spy;
pub mod text;
pub mod toast;
