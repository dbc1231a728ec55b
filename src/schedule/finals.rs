// Deriving the finals fixtures from the final standings.

use std::collections::HashSet;

use crate::{
    fixture::{Fixture, Leg},
    standings::Standing,
    team::{Category, Group, Team, CATEGORIES},
    types::TeamId
};

// Generate the finals for every category that has enough ranked teams.
// Categories split into groups get two semifinals and a final, the rest
// get a single final between the top two.
pub fn generate(teams: &[Team], standings: &[Standing]) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for category in CATEGORIES {
        let category_teams: Vec<&Team> = teams.iter()
            .filter(|team| team.category == category)
            .collect();

        if category_teams.iter().any(|team| team.group.is_some()) {
            generate_group_finals(&mut fixtures, &category_teams, standings, category);
        }
        else {
            generate_single_final(&mut fixtures, &category_teams, standings, category);
        }
    }

    return fixtures;
}

// A final between the two best teams of an undivided category.
fn generate_single_final(fixtures: &mut Vec<Fixture>, category_teams: &[&Team], standings: &[Standing], category: Category) {
    let ranked = ranked_ids(standings, category_teams, None);
    if ranked.len() < 2 {
        return;
    }

    fixtures.push(Fixture::build(ranked[0], ranked[1], category, None, Leg::Final, None));
}

// Crossed semifinals between the groups, plus the final.
// The final pairs the two group winners and is created together with the
// semifinals; semifinal results do not feed back into it.
fn generate_group_finals(fixtures: &mut Vec<Fixture>, category_teams: &[&Team], standings: &[Standing], category: Category) {
    let ranked_a = ranked_ids(standings, category_teams, Some(Group::A));
    let ranked_b = ranked_ids(standings, category_teams, Some(Group::B));
    if ranked_a.len() < 2 || ranked_b.len() < 2 {
        return;
    }

    fixtures.push(Fixture::build(ranked_a[0], ranked_b[1], category, None, Leg::Semifinal, None));
    fixtures.push(Fixture::build(ranked_b[0], ranked_a[1], category, None, Leg::Semifinal, None));
    fixtures.push(Fixture::build(ranked_a[0], ranked_b[0], category, None, Leg::Final, None));
}

// Standings narrowed down to one scope, best placements first.
fn ranked_ids(standings: &[Standing], category_teams: &[&Team], group: Option<Group>) -> Vec<TeamId> {
    let members: HashSet<TeamId> = category_teams.iter()
        .filter(|team| group.is_none() || team.group == group)
        .map(|team| team.id)
        .collect();

    let mut scoped: Vec<&Standing> = standings.iter()
        .filter(|standing| members.contains(&standing.team_id))
        .collect();

    scoped.sort_by(|a, b| a.rank.cmp(&b.rank));
    return scoped.iter().map(|standing| standing.team_id).collect();
}
