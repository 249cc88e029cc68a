// Shared building blocks for the page sections

mod animated_stat;
pub mod icons;
mod section_title;

pub use animated_stat::AnimatedStat;
pub use icons::Icon;
pub use section_title::SectionTitle;
