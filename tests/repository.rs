use devsearch::domain::review::{NewReview, VoteTally};
use devsearch::domain::types::{ProjectTitle, RichText, TagId, TagName, VoteValue};
use devsearch::domain::project::UpdateProject;
use devsearch::listing::search_and_paginate;
use devsearch::pagination::RESULTS_PER_PAGE;
use devsearch::params::ListParams;
use devsearch::repository::errors::RepositoryError;
use devsearch::repository::{
    ProfileReader, ProjectReader, ProjectWriter, ReviewReader, ReviewWriter, TagReader,
};

mod common;

#[test]
fn test_profile_repository_with_skills() {
    let test_db = common::TestDb::new("test_profile_repository_with_skills.db");
    let repo = test_db.repo();

    let ada = common::create_profile(&repo, "Ada", &[("Rust", "Ten years"), ("SQL", "")]);
    common::create_profile(&repo, "Linus", &[("C", "")]);

    let loaded = repo.get_profile_by_id(ada.id).unwrap().unwrap();
    assert_eq!(loaded.name.as_str(), "Ada");
    assert_eq!(loaded.skills.len(), 2);

    let (top, other) = loaded.partition_skills();
    assert_eq!(top[0].name.as_str(), "Rust");
    assert_eq!(top[0].description.as_deref(), Some("Ten years"));
    assert_eq!(other[0].name.as_str(), "SQL");

    let names: Vec<String> = repo
        .list_profiles()
        .unwrap()
        .into_iter()
        .map(|p| p.name.into_inner())
        .collect();
    assert_eq!(names, vec!["Ada", "Linus"]);
}

#[test]
fn test_project_tags_are_reused() {
    let test_db = common::TestDb::new("test_project_tags_are_reused.db");
    let repo = test_db.repo();
    let owner = common::create_profile(&repo, "Ada", &[]);

    let blog = common::create_project(&repo, owner.id, "Blog Engine", "python, web");
    let chat = common::create_project(&repo, owner.id, "Chat Bot", "python cli");

    let tags = repo.list_tags().unwrap();
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["cli", "python", "web"]);

    let python = tags.iter().find(|t| t.name.as_str() == "python").unwrap();
    assert!(blog.has_tag(python.id));
    assert!(chat.has_tag(python.id));

    // A tag both checked and typed again is linked once.
    let mut gadget = common::new_project(owner.id, "Gadget", "python");
    gadget.tag_ids = vec![python.id];
    let gadget = repo.create_project(&gadget).unwrap();
    assert_eq!(gadget.tags.len(), 1);
    assert_eq!(gadget.tags[0].id, python.id);
    assert_eq!(repo.list_tags().unwrap().len(), 3);
}

#[test]
fn test_get_tags_by_ids_skips_unknown() {
    let test_db = common::TestDb::new("test_get_tags_by_ids_skips_unknown.db");
    let repo = test_db.repo();
    let owner = common::create_profile(&repo, "Ada", &[]);
    let blog = common::create_project(&repo, owner.id, "Blog Engine", "web python");

    let mut ids: Vec<TagId> = blog.tags.iter().map(|t| t.id).collect();
    ids.push(TagId::new(999).unwrap());

    let found = repo.get_tags_by_ids(&ids).unwrap();
    let names: Vec<&str> = found.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["python", "web"]);
    assert!(repo.get_tags_by_ids(&[]).unwrap().is_empty());
}

#[test]
fn test_update_project_replaces_tag_links() {
    let test_db = common::TestDb::new("test_update_project_replaces_tag_links.db");
    let repo = test_db.repo();
    let owner = common::create_profile(&repo, "Ada", &[]);
    let blog = common::create_project(&repo, owner.id, "Blog Engine", "python web");
    let web = blog
        .tags
        .iter()
        .find(|t| t.name.as_str() == "web")
        .unwrap()
        .id;

    let updated = repo
        .update_project(
            blog.id,
            &UpdateProject {
                title: ProjectTitle::new("Blog Engine 2").unwrap(),
                description: RichText::new("<p>Now with comments</p>"),
                demo_link: None,
                source_link: None,
                tag_ids: vec![web],
                new_tags: vec![TagName::new("actix").unwrap()],
            },
        )
        .unwrap();

    assert_eq!(updated.title.as_str(), "Blog Engine 2");
    assert_eq!(
        updated.description.as_ref().map(|d| d.as_str()),
        Some("<p>Now with comments</p>")
    );
    let names: Vec<&str> = updated.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["actix", "web"]);
}

#[test]
fn test_review_updates_vote_tally() {
    let test_db = common::TestDb::new("test_review_updates_vote_tally.db");
    let repo = test_db.repo();
    let owner = common::create_profile(&repo, "Ada", &[]);
    let project = common::create_project(&repo, owner.id, "Blog Engine", "");

    let votes = [VoteValue::Up, VoteValue::Down, VoteValue::Up];
    let mut tally = VoteTally::default();
    for (i, value) in votes.into_iter().enumerate() {
        let reviewer = common::create_profile(&repo, &format!("Reviewer {i}"), &[]);
        assert!(!repo.has_reviewed(project.id, reviewer.id).unwrap());

        (_, tally) = repo
            .create_review(&NewReview {
                owner_id: reviewer.id,
                project_id: project.id,
                body: RichText::new("Nice"),
                value,
            })
            .unwrap();

        assert!(repo.has_reviewed(project.id, reviewer.id).unwrap());
    }

    assert_eq!(tally, VoteTally { total: 3, ratio: 67 });

    let project = repo.get_project_by_id(project.id).unwrap().unwrap();
    assert_eq!(project.vote_total, 3);
    assert_eq!(project.vote_ratio, 67);

    let reviews = repo.list_reviews(project.id).unwrap();
    assert_eq!(reviews.len(), 3);
    assert!(reviews.iter().all(|(review, _)| review.project_id == project.id));
}

#[test]
fn test_second_review_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_second_review_is_a_constraint_violation.db");
    let repo = test_db.repo();
    let owner = common::create_profile(&repo, "Ada", &[]);
    let reviewer = common::create_profile(&repo, "Linus", &[]);
    let project = common::create_project(&repo, owner.id, "Blog Engine", "");

    let review = NewReview {
        owner_id: reviewer.id,
        project_id: project.id,
        body: None,
        value: VoteValue::Up,
    };
    repo.create_review(&review).unwrap();

    assert!(matches!(
        repo.create_review(&review),
        Err(RepositoryError::ConstraintViolation(_))
    ));
    let project = repo.get_project_by_id(project.id).unwrap().unwrap();
    assert_eq!(project.vote_total, 1);
}

#[test]
fn test_delete_project_removes_links_and_reviews() {
    let test_db = common::TestDb::new("test_delete_project_removes_links_and_reviews.db");
    let repo = test_db.repo();
    let owner = common::create_profile(&repo, "Ada", &[]);
    let reviewer = common::create_profile(&repo, "Linus", &[]);
    let project = common::create_project(&repo, owner.id, "Blog Engine", "python");
    repo.create_review(&NewReview {
        owner_id: reviewer.id,
        project_id: project.id,
        body: None,
        value: VoteValue::Down,
    })
    .unwrap();

    repo.delete_project(project.id).unwrap();

    assert!(repo.get_project_by_id(project.id).unwrap().is_none());
    assert!(repo.list_reviews(project.id).unwrap().is_empty());
    assert_eq!(repo.list_tags().unwrap().len(), 1);
    assert!(matches!(
        repo.delete_project(project.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_listing_over_stored_projects() {
    let test_db = common::TestDb::new("test_listing_over_stored_projects.db");
    let repo = test_db.repo();
    let owner = common::create_profile(&repo, "Ada", &[]);

    common::create_project(&repo, owner.id, "Blog Engine", "python web");
    common::create_project(&repo, owner.id, "Chat Bot", "python cli");
    for i in 1..=5 {
        common::create_project(&repo, owner.id, &format!("Gadget {i}"), "rust");
    }

    let all = repo.list_projects().unwrap();
    assert_eq!(all.len(), 7);

    let listing = search_and_paginate(&ListParams::new(), all.clone(), RESULTS_PER_PAGE);
    assert_eq!(listing.page.total_pages, 3);
    assert_eq!(listing.page.items.len(), 3);

    let listing = search_and_paginate(&ListParams::new().page(10), all.clone(), RESULTS_PER_PAGE);
    assert_eq!(listing.page.page, 3);
    assert_eq!(listing.page.items.len(), 1);

    let listing = search_and_paginate(&ListParams::new().search("Python"), all, RESULTS_PER_PAGE);
    let titles: Vec<&str> = listing.page.items.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Blog Engine", "Chat Bot"]);
    assert_eq!(listing.search_query, "Python");
}

#[test]
fn test_projects_by_owner() {
    let test_db = common::TestDb::new("test_projects_by_owner.db");
    let repo = test_db.repo();
    let ada = common::create_profile(&repo, "Ada", &[]);
    let linus = common::create_profile(&repo, "Linus", &[]);

    common::create_project(&repo, ada.id, "Blog Engine", "");
    common::create_project(&repo, linus.id, "Kernel", "c");

    let projects = repo.list_projects_by_owner(linus.id).unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title.as_str(), "Kernel");
}
