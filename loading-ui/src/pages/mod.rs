mod loading;
mod tree;

pub use loading::LoadingPage;
pub use tree::{get_loading_tree, GetLoadingTreeFn, TreePage};
