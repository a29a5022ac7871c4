//! Classification prompt.

use marketfit_core::Sector;

/// Prompt asking for at most `max_results` labels from the closed set,
/// answered as a bare JSON array.
pub fn build_prompt(description: &str, max_results: usize) -> String {
    let labels = Sector::CLASSIFIABLE
        .iter()
        .map(Sector::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a startup classification assistant. Classify the business idea below into \
at most {max_results} relevant sectors from this fixed list:\n\
\n\
{labels}\n\
\n\
Business idea:\n\
\"\"\"{idea}\"\"\"\n\
\n\
Respond ONLY with a JSON array of up to {max_results} sector names from the list, most \
relevant first. Do not explain or add anything else.\n\
Example: [\"SaaS\", \"AI-ML\"]. Pick fewer sectors when fewer are relevant.\n",
        idea = description.trim(),
    )
}
