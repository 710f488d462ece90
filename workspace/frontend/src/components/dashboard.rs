mod view;

pub use view::Dashboard;
