// Both variants share `crate::merge::merge` and its tie-break, so for any valid total order they
// produce identical output. They only differ in the order the merges happen in.
pub mod bottom_up;
pub mod top_down;
