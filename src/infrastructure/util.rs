use crate::application::ports::util::SlugGenerator;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        ::slug::slugify(input)
    }
}
