use drill_core::{Category, SessionId, TopicId};
use services::{PracticeLoopService, PracticeProgress};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub topic: TopicId,
    pub title: &'static str,
    pub summary: &'static str,
    pub level_label: String,
    pub score_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySectionVm {
    pub label: &'static str,
    pub topics: Vec<TopicCardVm>,
}

#[must_use]
pub fn level_label(progress: &PracticeProgress) -> String {
    format!("Level {} of {}", progress.level, progress.max_level)
}

#[must_use]
pub fn map_topic_card(progress: &PracticeProgress) -> TopicCardVm {
    let info = progress.topic.info();
    let score_label = progress.accuracy_percent().map(|percent| {
        format!(
            "{}/{} correct ({percent}%)",
            progress.correct, progress.answered
        )
    });

    TopicCardVm {
        topic: progress.topic,
        title: info.title,
        summary: info.summary,
        level_label: level_label(progress),
        score_label,
    }
}

/// Group topic cards by category, keeping catalogue order inside each group.
#[must_use]
pub fn map_catalog(progress: &[PracticeProgress]) -> Vec<CategorySectionVm> {
    Category::ALL
        .iter()
        .map(|&category| CategorySectionVm {
            label: category.label(),
            topics: progress
                .iter()
                .filter(|item| item.topic.category() == category)
                .map(map_topic_card)
                .collect(),
        })
        .filter(|section| !section.topics.is_empty())
        .collect()
}

/// # Errors
///
/// Returns `ViewError::Unknown` when the session cannot be read.
pub async fn load_catalog(
    practice: &PracticeLoopService,
    session: SessionId,
) -> Result<Vec<CategorySectionVm>, ViewError> {
    let progress = practice
        .progress(session)
        .await
        .map_err(|_| ViewError::Unknown)?;
    Ok(map_catalog(&progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(topic: TopicId, answered: u32, correct: u32, level: u8) -> PracticeProgress {
        let info = topic.info();
        PracticeProgress {
            topic,
            answered,
            correct,
            streak: 0,
            best_streak: 0,
            level,
            min_level: info.min_level,
            max_level: info.max_level,
        }
    }

    #[test]
    fn groups_follow_category_order() {
        let items = vec![
            progress(TopicId::ClassifyAngles, 0, 0, 1),
            progress(TopicId::Rounding, 0, 0, 1),
            progress(TopicId::SimplifyFraction, 0, 0, 1),
        ];
        let sections = map_catalog(&items);
        let labels: Vec<_> = sections.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Number sense", "Fractions", "Geometry"]);
    }

    #[test]
    fn score_appears_after_first_answer() {
        let fresh = map_topic_card(&progress(TopicId::Addition, 0, 0, 1));
        assert_eq!(fresh.score_label, None);

        let card = map_topic_card(&progress(TopicId::Addition, 4, 3, 2));
        assert_eq!(card.score_label.as_deref(), Some("3/4 correct (75%)"));
        assert!(card.level_label.starts_with("Level 2 of "));
    }
}
