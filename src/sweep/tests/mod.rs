mod aggregation;
