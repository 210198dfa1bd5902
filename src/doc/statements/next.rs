/*!
# `NEXT <variable>`

## Purpose
Ends a `FOR` loop.

## Remarks
The variable must have been set up by `FOR`, otherwise it is
`NEXT WITHOUT FOR`.

## Example
```text
10 FOR I=1 TO 2
20 PRINT I
30 NEXT I
```

*/
