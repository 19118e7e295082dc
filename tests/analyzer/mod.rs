mod abort_mid_traversal_keeps_partial_results;
mod ancestor_projects_contribute_labels_only;
mod corrupt_history_is_reported_and_the_job_completes;
mod destroyed_items_are_tracked_even_when_filtered;
mod excluded_files_are_never_processed;
mod identical_timestamps_share_a_bucket;
mod registration_after_abort_is_rejected;
mod registration_rejects_invalid_roots_and_boundaries;
mod revisions_stay_inside_the_migrated_subtree;
mod sibling_projects_with_a_common_prefix_are_not_visited;
