use crate::{
    error::{Field, ValidationError},
    input::parse_percent,
    model::CutInput,
};
use backline_domain::{Cut, Member, MemberId, Percent, TourId, is_whole};
use fxhash::{FxHashMap, FxHashSet};

/// Checks user-edited cuts before they are saved.
pub struct CutValidator;

impl CutValidator {
    /// Parses and validates a full set of cuts for one tour.
    ///
    /// Every active member needs exactly one cut in `0..=100`, no cut may name
    /// anyone else, and the cuts must total 100.00 within 0.01. The returned
    /// cuts follow member order.
    pub fn validate(
        tour: TourId,
        members: &[Member],
        inputs: &[CutInput],
    ) -> Result<Vec<Cut>, ValidationError> {
        let participants: FxHashSet<MemberId> = members
            .iter()
            .filter(|member| member.active)
            .map(|member| member.id)
            .collect();

        let mut parsed: FxHashMap<MemberId, Percent> = FxHashMap::default();
        for input in inputs {
            if !participants.contains(&input.member) {
                return Err(ValidationError::UnknownMember(input.member));
            }
            let percent = parse_percent(Field::Cut(input.member), &input.percent)?;
            if parsed.insert(input.member, percent).is_some() {
                return Err(ValidationError::DuplicateCut(input.member));
            }
        }

        let mut cuts = Vec::with_capacity(parsed.len());
        for member in members.iter().filter(|member| member.active) {
            let Some(&percent) = parsed.get(&member.id) else {
                return Err(ValidationError::MissingCut(member.id));
            };
            cuts.push(Cut {
                tour,
                member: member.id,
                percent,
            });
        }

        let total: Percent = cuts.iter().map(|cut| cut.percent).sum();
        if !is_whole(total) {
            return Err(ValidationError::CutsNotWhole { total });
        }

        Ok(cuts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backline_domain::MemberRole;
    use rstest::{fixture, rstest};

    const TOUR: TourId = TourId(7);

    #[fixture]
    fn members() -> Vec<Member> {
        vec![
            Member::new(MemberId(1), "Vox", MemberRole::Owner),
            Member::new(MemberId(2), "Bass", MemberRole::Member),
            Member::new(MemberId(3), "Keys", MemberRole::Member).inactive(),
            Member::new(MemberId(4), "Drums", MemberRole::Manager),
        ]
    }

    fn inputs(cuts: &[(u64, &str)]) -> Vec<CutInput> {
        cuts.iter()
            .map(|(member, percent)| CutInput::new(MemberId(*member), *percent))
            .collect()
    }

    #[rstest]
    fn accepts_cuts_totalling_hundred(members: Vec<Member>) {
        let cuts = CutValidator::validate(
            TOUR,
            &members,
            &inputs(&[(4, "20"), (1, "40%"), (2, "40.00")]),
        )
        .expect("cuts are valid");

        let order: Vec<MemberId> = cuts.iter().map(|cut| cut.member).collect();
        assert_eq!(order, [MemberId(1), MemberId(2), MemberId(4)]);
        assert!(cuts.iter().all(|cut| cut.tour == TOUR));
    }

    #[rstest]
    #[case::within_tolerance_low(&[(1, "33.33"), (2, "33.33"), (4, "33.33")])]
    #[case::within_tolerance_high(&[(1, "33.34"), (2, "33.34"), (4, "33.33")])]
    fn tolerates_a_hundredth(members: Vec<Member>, #[case] cuts: &[(u64, &str)]) {
        assert!(CutValidator::validate(TOUR, &members, &inputs(cuts)).is_ok());
    }

    #[rstest]
    #[case::short(
        &[(1, "33.33"), (2, "33.33"), (4, "33.32")],
        ValidationError::CutsNotWhole { total: Percent::from_hundredths(9_998) }
    )]
    #[case::over(
        &[(1, "50"), (2, "50"), (4, "1")],
        ValidationError::CutsNotWhole { total: Percent::from_hundredths(10_100) }
    )]
    #[case::inactive_member(
        &[(1, "50"), (2, "25"), (3, "25")],
        ValidationError::UnknownMember(MemberId(3))
    )]
    #[case::stranger(&[(9, "100")], ValidationError::UnknownMember(MemberId(9)))]
    #[case::duplicate(
        &[(1, "50"), (1, "25"), (2, "25")],
        ValidationError::DuplicateCut(MemberId(1))
    )]
    #[case::missing(&[(1, "50"), (2, "50")], ValidationError::MissingCut(MemberId(4)))]
    #[case::out_of_range(
        &[(1, "150"), (2, "-25"), (4, "-25")],
        ValidationError::PercentOutOfRange {
            field: Field::Cut(MemberId(1)),
            value: rust_decimal::Decimal::new(150, 0),
        }
    )]
    #[case::not_a_number(
        &[(1, "half"), (2, "25"), (4, "25")],
        ValidationError::NotANumber { field: Field::Cut(MemberId(1)), input: "half".to_string() }
    )]
    fn rejects_invalid_cuts(
        members: Vec<Member>,
        #[case] cuts: &[(u64, &str)],
        #[case] expected: ValidationError,
    ) {
        assert_eq!(
            CutValidator::validate(TOUR, &members, &inputs(cuts)),
            Err(expected)
        );
    }
}
