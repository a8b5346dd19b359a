pub mod autolink;
pub mod br;
pub mod del;
pub mod em;
pub mod escape;
pub mod image;
pub mod inline_code;
pub mod link;
pub mod mailto;
pub mod reflink;
pub mod refimage;
pub mod strong;
pub mod text;
pub mod u;
pub mod url;
pub mod util;

use crate::rule::Rule;

pub fn all() -> Vec<Rule> {
    vec![
        escape::rule(),
        inline_code::rule(),
        autolink::rule(),
        mailto::rule(),
        br::rule(),
        image::rule(),
        refimage::rule(),
        link::rule(),
        reflink::rule(),
        strong::rule(),
        u::rule(),
        em::rule(),
        del::rule(),
        url::rule(),
        text::rule(),
    ]
}
