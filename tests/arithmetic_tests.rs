use coursework::exercises::errors::ExerciseError;
use coursework::exercises::matrix::Matrix;
use coursework::exercises::polymorphism::{Circle, Rectangle, Shape};
use coursework::exercises::scores::{higher, ScoreSheet};
use coursework::exercises::student::Student;
use coursework::output::format_general;

#[test]
fn test_matrix_sum_and_product() {
    let a = Matrix::from_rows(&[[1_i64, 2, 3], [4, 5, 6]]).expect("valid A");
    let b = Matrix::from_rows(&[[7_i64, 8, 9], [10, 11, 12]]).expect("valid B");
    let d = Matrix::from_rows(&[[1_i64, 2], [3, 4], [5, 6]]).expect("valid D");

    let sum = a.add(&b).expect("same shape");
    assert_eq!(
        sum,
        Matrix::from_rows(&[[8_i64, 10, 12], [14, 16, 18]]).unwrap()
    );

    let product = a.multiply(&d).expect("inner dimensions match");
    assert_eq!(product.shape(), (2, 2));
    assert_eq!(
        product,
        Matrix::from_rows(&[[22_i64, 28], [49, 64]]).unwrap()
    );
}

#[test]
fn test_matrix_product_is_not_commutative() {
    let a = Matrix::from_rows(&[[1_i64, 2, 3], [4, 5, 6]]).unwrap();
    let d = Matrix::from_rows(&[[1_i64, 2], [3, 4], [5, 6]]).unwrap();

    // 3x2 times 2x3 is defined too, with a 3x3 result
    let reversed = d.multiply(&a).expect("inner dimensions match");
    assert_eq!(reversed.shape(), (3, 3));
    assert_eq!(reversed.get(0, 0), Some(9));
    assert_eq!(reversed.get(2, 2), Some(51));
}

#[test]
fn test_matrix_dimension_mismatch() {
    let a = Matrix::from_rows(&[[1_i64, 2, 3], [4, 5, 6]]).unwrap();
    let d = Matrix::from_rows(&[[1_i64, 2], [3, 4], [5, 6]]).unwrap();

    let err = a.add(&d).unwrap_err();
    assert_eq!(
        err,
        ExerciseError::DimensionMismatch {
            operation: "addition",
            left: (2, 3),
            right: (3, 2),
        }
    );

    let err = a.multiply(&a).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Dimension mismatch in multiplication: 2x3 and 2x3"
    );
}

#[test]
fn test_shape_areas_through_handles() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(5.0, 3.0)),
        Box::new(Circle::new(4.0)),
        Box::new(Rectangle::new(0.5, 4.0)),
    ];
    let areas: Vec<String> = shapes.iter().map(|s| format_general(s.area())).collect();
    assert_eq!(areas, vec!["15", "50.2654", "2"]);
}

#[test]
fn test_score_tie() {
    let a = ScoreSheet {
        name: "Ann",
        scores: [80, 90, 100],
    };
    let b = ScoreSheet {
        name: "Ben",
        scores: [100, 90, 80],
    };
    assert_eq!(a.average(), 90.0);
    assert!(higher(&a, &b).is_none());
}

#[test]
fn test_student_average() {
    let mut stu = Student::new("Alice", 12345);
    assert_eq!(stu.average(), 0.0);

    stu.add_score(85.5);
    stu.add_score(92.0);
    stu.add_score(78.5);
    assert_eq!(format_general(stu.average()), "85.3333");
    assert_eq!(stu.name(), "Alice");
    assert_eq!(stu.id(), 12345);
}
