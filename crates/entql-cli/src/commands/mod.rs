pub mod render;

#[cfg(test)]
mod render_tests;
