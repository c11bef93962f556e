use clap::Args;
use folio_core::post::TagKind;

#[derive(Args, Debug, Clone)]
pub struct RelatedArgs {
    /// Source post ID
    pub id: String,

    /// Maximum number of related posts
    #[arg(long, short, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

/// Tag selection shared by post commands
#[derive(Args, Debug, Clone, Default)]
pub struct TagArgs {
    /// Topic tags (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub topic: Vec<String>,

    /// Technology tags (can be specified multiple times)
    #[arg(long = "tech", action = clap::ArgAction::Append)]
    pub technology: Vec<String>,

    /// Hashtags (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub hashtag: Vec<String>,
}

impl TagArgs {
    /// Flatten into (kind, raw name) pairs
    pub fn to_pairs(&self) -> Vec<(TagKind, String)> {
        let kinds = [
            (TagKind::Topic, &self.topic),
            (TagKind::Technology, &self.technology),
            (TagKind::Hashtag, &self.hashtag),
        ];
        kinds
            .into_iter()
            .flat_map(|(kind, names)| names.iter().map(move |n| (kind, n.clone())))
            .collect()
    }
}
